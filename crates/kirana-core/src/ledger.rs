//! # Ledger Module
//!
//! Every mutation of [`StoreData`] is a [`Command`] applied by the
//! single reducer in this module. The four lists (products, purchases,
//! sales, customers) form one consistency domain: a purchase moves
//! stock, a credit sale moves stock AND udhar, a customer delete
//! cascades into sales.
//!
//! ## Command Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Ledger Command Flow                           │
//! │                                                                     │
//! │  CLI form input                                                     │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Command (AddSale, EditPurchase, ...)                               │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  StoreData::apply ── validate + resolve ──► Err? discard command    │
//! │       │                                     (store untouched)       │
//! │       ▼                                                             │
//! │  mutate lists + derived fields (stock, totalCredit, paidAmount)     │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  caller persists the whole document                                 │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## All-or-Nothing
//! Each command arm performs every lookup and validation before its
//! first write. A returned error therefore guarantees the store is
//! exactly as it was.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::{LedgerError, LedgerResult};
use crate::money::Money;
use crate::types::{Customer, CustomerPayment, PaymentType, Product, Purchase, Sale, StoreData};
use crate::validation::{
    validate_name, validate_payment_amount, validate_price, validate_quantity,
};

// =============================================================================
// Form Inputs
// =============================================================================

/// Fields of the product form.
#[derive(Debug, Clone)]
pub struct ProductForm {
    pub name: String,
    pub category: String,
    pub unit: String,
    pub cost_price: Money,
    pub sell_price: Money,
    pub stock: i64,
    pub min_stock: i64,
}

/// Fields of the purchase form.
#[derive(Debug, Clone)]
pub struct PurchaseForm {
    pub product_id: String,
    /// Empty means a general/unknown supplier.
    pub supplier_name: String,
    pub quantity: i64,
    pub cost_per_unit: Money,
    pub date: NaiveDate,
    pub notes: Option<String>,
}

/// Fields of the sale form.
#[derive(Debug, Clone)]
pub struct SaleForm {
    pub product_id: String,
    /// Required for credit sales, optional for cash.
    pub customer_id: Option<String>,
    pub quantity: i64,
    pub payment_type: PaymentType,
    pub date: NaiveDate,
    pub notes: Option<String>,
}

/// Fields of the customer form.
#[derive(Debug, Clone)]
pub struct CustomerForm {
    pub name: String,
    pub phone: String,
    pub phone_alt: Option<String>,
    /// On add: the opening udhar balance. On edit: overwrites
    /// `total_credit` as entered (input-trust, may desynchronize from
    /// the sale history).
    pub opening_credit: Money,
}

// =============================================================================
// Commands
// =============================================================================

/// A typed update to the ledger.
///
/// Note the asymmetry: purchases can be edited and deleted, sales can
/// only be added. Retroactive sale mutation would silently corrupt
/// stock and udhar history, so it is not offered.
#[derive(Debug, Clone)]
pub enum Command {
    AddProduct(ProductForm),
    EditProduct { id: String, form: ProductForm },
    /// Removes the product only; existing purchases/sales keep their
    /// (now dangling) product reference and name snapshot.
    DeleteProduct { id: String },

    AddPurchase(PurchaseForm),
    EditPurchase { id: String, form: PurchaseForm },
    DeletePurchase { id: String },

    AddSale(SaleForm),

    AddCustomer(CustomerForm),
    EditCustomer { id: String, form: CustomerForm },
    /// Removes the customer AND every sale referencing them. Stock
    /// consumed by those sales is not restored.
    DeleteCustomer { id: String },

    AddPayment {
        customer_id: String,
        amount: Money,
        date: NaiveDate,
        notes: Option<String>,
    },
}

// =============================================================================
// Reducer
// =============================================================================

impl StoreData {
    /// Applies one command to the ledger.
    ///
    /// Returns `Err` with the store unchanged when a precondition
    /// fails; see [`LedgerError`] for the failure taxonomy.
    pub fn apply(&mut self, command: Command) -> LedgerResult<()> {
        match command {
            Command::AddProduct(form) => self.add_product(form),
            Command::EditProduct { id, form } => self.edit_product(&id, form),
            Command::DeleteProduct { id } => self.delete_product(&id),
            Command::AddPurchase(form) => self.add_purchase(form),
            Command::EditPurchase { id, form } => self.edit_purchase(&id, form),
            Command::DeletePurchase { id } => self.delete_purchase(&id),
            Command::AddSale(form) => self.add_sale(form),
            Command::AddCustomer(form) => self.add_customer(form),
            Command::EditCustomer { id, form } => self.edit_customer(&id, form),
            Command::DeleteCustomer { id } => self.delete_customer(&id),
            Command::AddPayment {
                customer_id,
                amount,
                date,
                notes,
            } => self.add_payment(&customer_id, amount, date, notes),
        }
    }

    // -------------------------------------------------------------------------
    // Products
    // -------------------------------------------------------------------------

    fn add_product(&mut self, form: ProductForm) -> LedgerResult<()> {
        validate_product_form(&form)?;

        self.products.push(Product {
            id: new_id(),
            name: form.name.trim().to_string(),
            category: form.category.trim().to_string(),
            unit: form.unit,
            cost_price: form.cost_price,
            sell_price: form.sell_price,
            stock: form.stock,
            min_stock: form.min_stock,
        });
        Ok(())
    }

    fn edit_product(&mut self, id: &str, form: ProductForm) -> LedgerResult<()> {
        validate_product_form(&form)?;
        let idx = self
            .product_index(id)
            .ok_or_else(|| LedgerError::ProductNotFound(id.to_string()))?;

        let product = &mut self.products[idx];
        product.name = form.name.trim().to_string();
        product.category = form.category.trim().to_string();
        product.unit = form.unit;
        product.cost_price = form.cost_price;
        product.sell_price = form.sell_price;
        product.stock = form.stock;
        product.min_stock = form.min_stock;
        Ok(())
    }

    fn delete_product(&mut self, id: &str) -> LedgerResult<()> {
        let idx = self
            .product_index(id)
            .ok_or_else(|| LedgerError::ProductNotFound(id.to_string()))?;
        self.products.remove(idx);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Purchases
    // -------------------------------------------------------------------------

    fn add_purchase(&mut self, form: PurchaseForm) -> LedgerResult<()> {
        validate_quantity(form.quantity)?;
        validate_price("cost per unit", form.cost_per_unit)?;
        let product_idx = self
            .product_index(&form.product_id)
            .ok_or_else(|| LedgerError::ProductNotFound(form.product_id.clone()))?;

        let product = &mut self.products[product_idx];
        product.stock += form.quantity;
        // Latest purchase sets the product-wide cost price
        product.cost_price = form.cost_per_unit;
        let product_name = product.name.clone();

        self.purchases.push(Purchase {
            id: new_id(),
            product_id: form.product_id,
            product_name,
            supplier_name: form.supplier_name.trim().to_string(),
            quantity: form.quantity,
            cost_per_unit: form.cost_per_unit,
            total_cost: form.cost_per_unit.multiply_quantity(form.quantity),
            date: form.date,
            notes: normalize_notes(form.notes),
        });
        Ok(())
    }

    /// Reverses the old purchase's stock effect, then applies the new
    /// one. For an unchanged product and quantity the two cancel out.
    fn edit_purchase(&mut self, id: &str, form: PurchaseForm) -> LedgerResult<()> {
        validate_quantity(form.quantity)?;
        validate_price("cost per unit", form.cost_per_unit)?;
        let purchase_idx = self
            .purchases
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| LedgerError::PurchaseNotFound(id.to_string()))?;
        let new_product_idx = self
            .product_index(&form.product_id)
            .ok_or_else(|| LedgerError::ProductNotFound(form.product_id.clone()))?;

        let old = self.purchases[purchase_idx].clone();

        // The old product may have been deleted since; then there is
        // nothing to reverse. No zero floor here: the reversal must be
        // exact or a same-product edit would not be a no-op.
        if let Some(old_idx) = self.product_index(&old.product_id) {
            self.products[old_idx].stock -= old.quantity;
        }

        let product = &mut self.products[new_product_idx];
        product.stock += form.quantity;
        product.cost_price = form.cost_per_unit;
        let product_name = product.name.clone();

        self.purchases[purchase_idx] = Purchase {
            id: old.id,
            product_id: form.product_id,
            product_name,
            supplier_name: form.supplier_name.trim().to_string(),
            quantity: form.quantity,
            cost_per_unit: form.cost_per_unit,
            total_cost: form.cost_per_unit.multiply_quantity(form.quantity),
            date: form.date,
            notes: normalize_notes(form.notes),
        };
        Ok(())
    }

    fn delete_purchase(&mut self, id: &str) -> LedgerResult<()> {
        let purchase_idx = self
            .purchases
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| LedgerError::PurchaseNotFound(id.to_string()))?;

        let purchase = self.purchases.remove(purchase_idx);
        if let Some(idx) = self.product_index(&purchase.product_id) {
            let product = &mut self.products[idx];
            product.stock = (product.stock - purchase.quantity).max(0);
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Sales
    // -------------------------------------------------------------------------

    fn add_sale(&mut self, form: SaleForm) -> LedgerResult<()> {
        validate_quantity(form.quantity)?;
        let product_idx = self
            .product_index(&form.product_id)
            .ok_or_else(|| LedgerError::ProductNotFound(form.product_id.clone()))?;

        let product = &self.products[product_idx];
        if product.stock < form.quantity {
            return Err(LedgerError::InsufficientStock {
                name: product.name.clone(),
                available: product.stock,
                requested: form.quantity,
            });
        }

        // Empty selection counts as no customer
        let customer_id = form
            .customer_id
            .filter(|id| !id.trim().is_empty());

        // Credit requires a resolvable customer; a cash sale may carry
        // one for the record
        let customer_idx = match &customer_id {
            Some(id) => {
                let idx = self.customers.iter().position(|c| &c.id == id);
                if idx.is_none() && form.payment_type == PaymentType::Credit {
                    return Err(LedgerError::CustomerNotFound(id.clone()));
                }
                idx
            }
            None if form.payment_type == PaymentType::Credit => {
                return Err(LedgerError::CustomerRequired);
            }
            None => None,
        };

        let sell_price = product.sell_price;
        let total_amount = sell_price.multiply_quantity(form.quantity);
        let product_name = product.name.clone();
        let customer_name = customer_idx.map(|idx| self.customers[idx].name.clone());

        self.products[product_idx].stock -= form.quantity;
        if form.payment_type == PaymentType::Credit {
            if let Some(idx) = customer_idx {
                self.customers[idx].total_credit += total_amount;
            }
        }

        self.sales.push(Sale {
            id: new_id(),
            product_id: form.product_id,
            product_name,
            customer_id,
            customer_name,
            quantity: form.quantity,
            sell_price,
            total_amount,
            payment_type: form.payment_type,
            date: form.date,
            notes: normalize_notes(form.notes),
        });
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Customers
    // -------------------------------------------------------------------------

    fn add_customer(&mut self, form: CustomerForm) -> LedgerResult<()> {
        validate_name("name", &form.name)?;

        self.customers.push(Customer {
            id: new_id(),
            name: form.name.trim().to_string(),
            phone: form.phone.trim().to_string(),
            phone_alt: normalize_notes(form.phone_alt),
            total_credit: form.opening_credit,
            paid_amount: Money::zero(),
            payments: Vec::new(),
        });
        Ok(())
    }

    fn edit_customer(&mut self, id: &str, form: CustomerForm) -> LedgerResult<()> {
        validate_name("name", &form.name)?;
        let idx = self
            .customers
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| LedgerError::CustomerNotFound(id.to_string()))?;

        let customer = &mut self.customers[idx];
        customer.name = form.name.trim().to_string();
        customer.phone = form.phone.trim().to_string();
        customer.phone_alt = normalize_notes(form.phone_alt);
        // Opening-balance overwrite; paid_amount and the payment log
        // are untouched
        customer.total_credit = form.opening_credit;
        Ok(())
    }

    fn delete_customer(&mut self, id: &str) -> LedgerResult<()> {
        let idx = self
            .customers
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| LedgerError::CustomerNotFound(id.to_string()))?;

        self.customers.remove(idx);
        // Cascade: drop this customer's sales. Their consumed stock is
        // NOT restored.
        self.sales.retain(|s| s.customer_id.as_deref() != Some(id));
        Ok(())
    }

    fn add_payment(
        &mut self,
        customer_id: &str,
        amount: Money,
        date: NaiveDate,
        notes: Option<String>,
    ) -> LedgerResult<()> {
        validate_payment_amount(amount)?;
        let idx = self
            .customers
            .iter()
            .position(|c| c.id == customer_id)
            .ok_or_else(|| LedgerError::CustomerNotFound(customer_id.to_string()))?;

        let customer = &mut self.customers[idx];
        customer.paid_amount += amount;
        customer.payments.push(CustomerPayment {
            amount,
            date,
            notes: normalize_notes(notes),
        });
        Ok(())
    }

    fn product_index(&self, id: &str) -> Option<usize> {
        self.products.iter().position(|p| p.id == id)
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Trims free-text fields; empty becomes absent.
fn normalize_notes(notes: Option<String>) -> Option<String> {
    notes
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
}

fn validate_product_form(form: &ProductForm) -> LedgerResult<()> {
    validate_name("name", &form.name)?;
    validate_price("cost price", form.cost_price)?;
    validate_price("sell price", form.sell_price)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn test_product(id: &str, stock: i64, cost: i64, sell: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            category: "Grains".to_string(),
            unit: "kg".to_string(),
            cost_price: Money::from_rupees(cost),
            sell_price: Money::from_rupees(sell),
            stock,
            min_stock: 5,
        }
    }

    fn test_customer(id: &str, credit: i64, paid: i64) -> Customer {
        Customer {
            id: id.to_string(),
            name: format!("Customer {}", id),
            phone: "9841000000".to_string(),
            phone_alt: None,
            total_credit: Money::from_rupees(credit),
            paid_amount: Money::from_rupees(paid),
            payments: Vec::new(),
        }
    }

    fn purchase_form(product_id: &str, qty: i64, cost: i64) -> PurchaseForm {
        PurchaseForm {
            product_id: product_id.to_string(),
            supplier_name: "Hari Traders".to_string(),
            quantity: qty,
            cost_per_unit: Money::from_rupees(cost),
            date: date("2024-06-01"),
            notes: None,
        }
    }

    fn sale_form(product_id: &str, qty: i64, payment_type: PaymentType) -> SaleForm {
        SaleForm {
            product_id: product_id.to_string(),
            customer_id: None,
            quantity: qty,
            payment_type,
            date: date("2024-06-02"),
            notes: None,
        }
    }

    // -------------------------------------------------------------------------
    // Products
    // -------------------------------------------------------------------------

    #[test]
    fn test_add_product_requires_name() {
        let mut data = StoreData::default();
        let err = data.apply(Command::AddProduct(ProductForm {
            name: "   ".to_string(),
            category: String::new(),
            unit: "pcs".to_string(),
            cost_price: Money::zero(),
            sell_price: Money::zero(),
            stock: 0,
            min_stock: 5,
        }));

        assert!(matches!(err, Err(LedgerError::Validation(_))));
        assert_eq!(data, StoreData::default());
    }

    #[test]
    fn test_add_and_edit_product() {
        let mut data = StoreData::default();
        data.apply(Command::AddProduct(ProductForm {
            name: "Rice".to_string(),
            category: "Grains".to_string(),
            unit: "kg".to_string(),
            cost_price: Money::from_rupees(5),
            sell_price: Money::from_rupees(8),
            stock: 10,
            min_stock: 5,
        }))
        .unwrap();

        assert_eq!(data.products.len(), 1);
        let id = data.products[0].id.clone();

        data.apply(Command::EditProduct {
            id: id.clone(),
            form: ProductForm {
                name: "Basmati Rice".to_string(),
                category: "Grains".to_string(),
                unit: "kg".to_string(),
                cost_price: Money::from_rupees(6),
                sell_price: Money::from_rupees(9),
                stock: 12,
                min_stock: 4,
            },
        })
        .unwrap();

        let product = data.product(&id).unwrap();
        assert_eq!(product.name, "Basmati Rice");
        assert_eq!(product.stock, 12);
    }

    #[test]
    fn test_delete_product_leaves_history_dangling() {
        let mut data = StoreData {
            products: vec![test_product("p1", 0, 5, 8)],
            ..StoreData::default()
        };
        data.apply(Command::AddPurchase(purchase_form("p1", 10, 5)))
            .unwrap();

        data.apply(Command::DeleteProduct {
            id: "p1".to_string(),
        })
        .unwrap();

        assert!(data.products.is_empty());
        // The purchase record survives with its snapshot name
        assert_eq!(data.purchases.len(), 1);
        assert_eq!(data.purchases[0].product_name, "Product p1");
    }

    // -------------------------------------------------------------------------
    // Purchases
    // -------------------------------------------------------------------------

    #[test]
    fn test_add_purchase_moves_stock_and_cost_price() {
        let mut data = StoreData {
            products: vec![test_product("p1", 10, 5, 8)],
            ..StoreData::default()
        };

        data.apply(Command::AddPurchase(purchase_form("p1", 7, 6)))
            .unwrap();

        let product = data.product("p1").unwrap();
        assert_eq!(product.stock, 17);
        assert_eq!(product.cost_price, Money::from_rupees(6));

        let purchase = &data.purchases[0];
        assert_eq!(purchase.product_name, "Product p1");
        assert_eq!(purchase.total_cost, Money::from_rupees(42));
    }

    #[test]
    fn test_add_purchase_rejects_unknown_product_and_bad_quantity() {
        let mut data = StoreData {
            products: vec![test_product("p1", 10, 5, 8)],
            ..StoreData::default()
        };
        let before = data.clone();

        assert!(matches!(
            data.apply(Command::AddPurchase(purchase_form("ghost", 5, 6))),
            Err(LedgerError::ProductNotFound(_))
        ));
        assert!(matches!(
            data.apply(Command::AddPurchase(purchase_form("p1", 0, 6))),
            Err(LedgerError::Validation(_))
        ));
        assert_eq!(data, before);
    }

    #[test]
    fn test_stock_accounting_over_purchases_and_sales() {
        // stock = initial + Σ purchase qty - Σ sale qty
        let mut data = StoreData {
            products: vec![test_product("p1", 10, 5, 8)],
            ..StoreData::default()
        };

        data.apply(Command::AddPurchase(purchase_form("p1", 7, 5)))
            .unwrap();
        data.apply(Command::AddPurchase(purchase_form("p1", 3, 5)))
            .unwrap();
        data.apply(Command::AddSale(sale_form("p1", 4, PaymentType::Cash)))
            .unwrap();
        data.apply(Command::AddSale(sale_form("p1", 2, PaymentType::Cash)))
            .unwrap();

        assert_eq!(data.product("p1").unwrap().stock, 10 + 7 + 3 - 4 - 2);
    }

    #[test]
    fn test_edit_purchase_same_product_same_quantity_is_noop_for_stock() {
        let mut data = StoreData {
            products: vec![test_product("p1", 10, 5, 8)],
            ..StoreData::default()
        };
        data.apply(Command::AddPurchase(purchase_form("p1", 7, 5)))
            .unwrap();
        let id = data.purchases[0].id.clone();
        assert_eq!(data.product("p1").unwrap().stock, 17);

        data.apply(Command::EditPurchase {
            id,
            form: purchase_form("p1", 7, 5),
        })
        .unwrap();

        assert_eq!(data.product("p1").unwrap().stock, 17);
    }

    #[test]
    fn test_edit_purchase_moves_stock_between_products() {
        let mut data = StoreData {
            products: vec![test_product("p1", 0, 5, 8), test_product("p2", 0, 4, 6)],
            ..StoreData::default()
        };
        data.apply(Command::AddPurchase(purchase_form("p1", 10, 5)))
            .unwrap();
        let id = data.purchases[0].id.clone();

        data.apply(Command::EditPurchase {
            id: id.clone(),
            form: purchase_form("p2", 6, 7),
        })
        .unwrap();

        assert_eq!(data.product("p1").unwrap().stock, 0);
        let p2 = data.product("p2").unwrap();
        assert_eq!(p2.stock, 6);
        assert_eq!(p2.cost_price, Money::from_rupees(7));

        let purchase = data.purchase(&id).unwrap();
        assert_eq!(purchase.product_id, "p2");
        assert_eq!(purchase.product_name, "Product p2");
        assert_eq!(purchase.total_cost, Money::from_rupees(42));
    }

    #[test]
    fn test_edit_purchase_keeps_record_count_and_id() {
        let mut data = StoreData {
            products: vec![test_product("p1", 0, 5, 8)],
            ..StoreData::default()
        };
        data.apply(Command::AddPurchase(purchase_form("p1", 10, 5)))
            .unwrap();
        let id = data.purchases[0].id.clone();

        data.apply(Command::EditPurchase {
            id: id.clone(),
            form: purchase_form("p1", 4, 9),
        })
        .unwrap();

        assert_eq!(data.purchases.len(), 1);
        assert_eq!(data.purchases[0].id, id);
        assert_eq!(data.product("p1").unwrap().stock, 4);
    }

    #[test]
    fn test_delete_purchase_floors_stock_at_zero() {
        let mut data = StoreData {
            products: vec![test_product("p1", 0, 5, 8)],
            ..StoreData::default()
        };
        data.apply(Command::AddPurchase(purchase_form("p1", 10, 5)))
            .unwrap();
        let id = data.purchases[0].id.clone();

        // Sell most of the purchased stock, then delete the purchase:
        // 10 - 8 = 2 on hand, minus 10 floors at 0
        data.apply(Command::AddSale(sale_form("p1", 8, PaymentType::Cash)))
            .unwrap();
        data.apply(Command::DeletePurchase { id }).unwrap();

        assert_eq!(data.product("p1").unwrap().stock, 0);
        assert!(data.purchases.is_empty());
    }

    #[test]
    fn test_delete_unknown_purchase() {
        let mut data = StoreData::default();
        assert!(matches!(
            data.apply(Command::DeletePurchase {
                id: "ghost".to_string()
            }),
            Err(LedgerError::PurchaseNotFound(_))
        ));
    }

    // -------------------------------------------------------------------------
    // Sales
    // -------------------------------------------------------------------------

    #[test]
    fn test_cash_sale_scenario() {
        // Product {stock: 10, cost: 5, sell: 8}; cash sale of 3 leaves
        // stock 7, total Rs 24, and touches no customer
        let mut data = StoreData {
            products: vec![test_product("p1", 10, 5, 8)],
            customers: vec![test_customer("c1", 0, 0)],
            ..StoreData::default()
        };
        let customers_before = data.customers.clone();

        data.apply(Command::AddSale(sale_form("p1", 3, PaymentType::Cash)))
            .unwrap();

        assert_eq!(data.product("p1").unwrap().stock, 7);
        assert_eq!(data.sales.len(), 1);
        let sale = &data.sales[0];
        assert_eq!(sale.total_amount, Money::from_rupees(24));
        assert_eq!(sale.sell_price, Money::from_rupees(8));
        assert_eq!(sale.customer_id, None);
        assert_eq!(data.customers, customers_before);
    }

    #[test]
    fn test_credit_sale_increases_udhar() {
        let mut data = StoreData {
            products: vec![test_product("p1", 10, 5, 8)],
            customers: vec![test_customer("c1", 100, 20)],
            ..StoreData::default()
        };

        let mut form = sale_form("p1", 3, PaymentType::Credit);
        form.customer_id = Some("c1".to_string());
        data.apply(Command::AddSale(form)).unwrap();

        let customer = data.customer("c1").unwrap();
        assert_eq!(customer.total_credit, Money::from_rupees(124));
        assert_eq!(customer.balance(), Money::from_rupees(104));

        let sale = &data.sales[0];
        assert_eq!(sale.customer_name.as_deref(), Some("Customer c1"));
    }

    #[test]
    fn test_oversell_leaves_store_unchanged() {
        let mut data = StoreData {
            products: vec![test_product("p1", 3, 5, 8)],
            ..StoreData::default()
        };
        let before = data.clone();

        let err = data.apply(Command::AddSale(sale_form("p1", 5, PaymentType::Cash)));
        assert!(matches!(
            err,
            Err(LedgerError::InsufficientStock {
                available: 3,
                requested: 5,
                ..
            })
        ));
        assert_eq!(data, before);
    }

    #[test]
    fn test_credit_sale_without_customer_is_rejected() {
        let mut data = StoreData {
            products: vec![test_product("p1", 10, 5, 8)],
            ..StoreData::default()
        };
        let before = data.clone();

        assert!(matches!(
            data.apply(Command::AddSale(sale_form("p1", 2, PaymentType::Credit))),
            Err(LedgerError::CustomerRequired)
        ));

        // An empty selection is the same as none
        let mut form = sale_form("p1", 2, PaymentType::Credit);
        form.customer_id = Some("  ".to_string());
        assert!(matches!(
            data.apply(Command::AddSale(form)),
            Err(LedgerError::CustomerRequired)
        ));
        assert_eq!(data, before);
    }

    #[test]
    fn test_credit_sale_with_unknown_customer_is_rejected() {
        let mut data = StoreData {
            products: vec![test_product("p1", 10, 5, 8)],
            ..StoreData::default()
        };
        let before = data.clone();

        let mut form = sale_form("p1", 2, PaymentType::Credit);
        form.customer_id = Some("ghost".to_string());
        assert!(matches!(
            data.apply(Command::AddSale(form)),
            Err(LedgerError::CustomerNotFound(_))
        ));
        assert_eq!(data, before);
    }

    #[test]
    fn test_cash_sale_may_carry_customer_reference() {
        let mut data = StoreData {
            products: vec![test_product("p1", 10, 5, 8)],
            customers: vec![test_customer("c1", 0, 0)],
            ..StoreData::default()
        };

        let mut form = sale_form("p1", 1, PaymentType::Cash);
        form.customer_id = Some("c1".to_string());
        data.apply(Command::AddSale(form)).unwrap();

        let sale = &data.sales[0];
        assert_eq!(sale.customer_id.as_deref(), Some("c1"));
        assert_eq!(sale.customer_name.as_deref(), Some("Customer c1"));
        // Cash: udhar untouched
        assert_eq!(data.customer("c1").unwrap().total_credit, Money::zero());
    }

    // -------------------------------------------------------------------------
    // Customers & Payments
    // -------------------------------------------------------------------------

    #[test]
    fn test_add_payment_scenario() {
        // Customer {credit: 100, paid: 20} (balance 80); a payment of 30
        // moves paid to 50, balance to 50, and appends one log entry
        let mut data = StoreData {
            customers: vec![test_customer("c1", 100, 20)],
            ..StoreData::default()
        };

        data.apply(Command::AddPayment {
            customer_id: "c1".to_string(),
            amount: Money::from_rupees(30),
            date: date("2024-06-03"),
            notes: Some("  partial  ".to_string()),
        })
        .unwrap();

        let customer = data.customer("c1").unwrap();
        assert_eq!(customer.paid_amount, Money::from_rupees(50));
        assert_eq!(customer.balance(), Money::from_rupees(50));
        assert_eq!(customer.payments.len(), 1);
        assert_eq!(customer.payments[0].amount, Money::from_rupees(30));
        assert_eq!(customer.payments[0].notes.as_deref(), Some("partial"));
    }

    #[test]
    fn test_overpayment_is_allowed() {
        let mut data = StoreData {
            customers: vec![test_customer("c1", 100, 20)],
            ..StoreData::default()
        };

        data.apply(Command::AddPayment {
            customer_id: "c1".to_string(),
            amount: Money::from_rupees(200),
            date: date("2024-06-03"),
            notes: None,
        })
        .unwrap();

        assert_eq!(
            data.customer("c1").unwrap().balance(),
            Money::from_rupees(-120)
        );
    }

    #[test]
    fn test_payment_rejects_bad_amount_and_unknown_customer() {
        let mut data = StoreData {
            customers: vec![test_customer("c1", 100, 20)],
            ..StoreData::default()
        };
        let before = data.clone();

        assert!(matches!(
            data.apply(Command::AddPayment {
                customer_id: "c1".to_string(),
                amount: Money::zero(),
                date: date("2024-06-03"),
                notes: None,
            }),
            Err(LedgerError::Validation(_))
        ));
        assert!(matches!(
            data.apply(Command::AddPayment {
                customer_id: "ghost".to_string(),
                amount: Money::from_rupees(10),
                date: date("2024-06-03"),
                notes: None,
            }),
            Err(LedgerError::CustomerNotFound(_))
        ));
        assert_eq!(data, before);
    }

    #[test]
    fn test_edit_customer_overwrites_opening_balance_only() {
        let mut data = StoreData {
            customers: vec![test_customer("c1", 100, 20)],
            ..StoreData::default()
        };

        data.apply(Command::EditCustomer {
            id: "c1".to_string(),
            form: CustomerForm {
                name: "Sita Devi".to_string(),
                phone: "9841111111".to_string(),
                phone_alt: Some(String::new()),
                opening_credit: Money::from_rupees(250),
            },
        })
        .unwrap();

        let customer = data.customer("c1").unwrap();
        assert_eq!(customer.name, "Sita Devi");
        assert_eq!(customer.total_credit, Money::from_rupees(250));
        // paid_amount survives the overwrite
        assert_eq!(customer.paid_amount, Money::from_rupees(20));
        assert_eq!(customer.phone_alt, None);
    }

    #[test]
    fn test_delete_customer_cascades_into_sales() {
        let mut data = StoreData {
            products: vec![test_product("p1", 20, 5, 8)],
            customers: vec![test_customer("c1", 0, 0), test_customer("c2", 0, 0)],
            ..StoreData::default()
        };

        let mut credit = sale_form("p1", 2, PaymentType::Credit);
        credit.customer_id = Some("c1".to_string());
        data.apply(Command::AddSale(credit)).unwrap();

        let mut other = sale_form("p1", 1, PaymentType::Credit);
        other.customer_id = Some("c2".to_string());
        data.apply(Command::AddSale(other)).unwrap();

        data.apply(Command::AddSale(sale_form("p1", 3, PaymentType::Cash)))
            .unwrap();
        let stock_after_sales = data.product("p1").unwrap().stock;

        data.apply(Command::DeleteCustomer {
            id: "c1".to_string(),
        })
        .unwrap();

        assert_eq!(data.customers.len(), 1);
        assert_eq!(data.customers[0].id, "c2");
        // c1's sale is gone, the others survive
        assert_eq!(data.sales.len(), 2);
        assert!(data
            .sales
            .iter()
            .all(|s| s.customer_id.as_deref() != Some("c1")));
        // Consumed stock is not restored by the cascade
        assert_eq!(data.product("p1").unwrap().stock, stock_after_sales);
    }
}
