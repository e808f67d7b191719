//! The data context placeholders resolve against.
//!
//! Four closed namespaces: `tenant`, `invoice`, `customer` and `user`.
//! The surrounding application fetches these records and hands them over
//! as JSON; every field accepts either a string or a number.

use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// NAMESPACES
// ============================================================================

/// A top-level placeholder namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Namespace {
    Tenant,
    Invoice,
    Customer,
    User,
}

impl Namespace {
    pub const ALL: [Namespace; 4] = [
        Namespace::Tenant,
        Namespace::Invoice,
        Namespace::Customer,
        Namespace::User,
    ];

    /// Parse the namespace part of a token. Exact, case-sensitive match.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "tenant" => Some(Namespace::Tenant),
            "invoice" => Some(Namespace::Invoice),
            "customer" => Some(Namespace::Customer),
            "user" => Some(Namespace::User),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Namespace::Tenant => "tenant",
            Namespace::Invoice => "invoice",
            Namespace::Customer => "customer",
            Namespace::User => "user",
        }
    }

    /// Generic label shown when a token names an unknown field.
    pub fn label(self) -> &'static str {
        match self {
            Namespace::Tenant => "Company Info",
            Namespace::Invoice => "Invoice Info",
            Namespace::Customer => "Customer Info",
            Namespace::User => "User Info",
        }
    }

    /// Known fields as `(field, human label)` pairs.
    pub fn fields(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Namespace::Tenant => &[
                ("companyName", "Company Name"),
                ("address", "Company Address"),
                ("phone", "Company Phone"),
                ("email", "Company Email"),
                ("gst", "GST Number"),
                ("logo", "Company Logo"),
            ],
            Namespace::Invoice => &[
                ("billNo", "Bill Number"),
                ("date", "Bill Date"),
                ("subtotal", "Subtotal"),
                ("discount", "Discount"),
                ("tax", "Tax"),
                ("total", "Total"),
            ],
            Namespace::Customer => &[
                ("name", "Customer Name"),
                ("phone", "Customer Phone"),
                ("address", "Customer Address"),
                ("email", "Customer Email"),
            ],
            Namespace::User => &[("name", "Staff Name")],
        }
    }
}

// ============================================================================
// FIELD DESERIALIZATION
// ============================================================================

#[derive(Deserialize)]
#[serde(untagged)]
enum FieldValue {
    Text(String),
    Number(f64),
}

/// Accepts a string, a number, or null. Numbers print without a trailing `.0`.
fn deserialize_display<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<FieldValue> = Option::deserialize(deserializer)?;
    Ok(match opt {
        None => String::new(),
        Some(FieldValue::Text(s)) => s,
        Some(FieldValue::Number(n)) => format_number(n),
    })
}

/// Largest magnitude below which every integer is exact in an `f64`.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Whole numbers print without a fractional part, the rest as-is.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < MAX_EXACT_INTEGER {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

/// Accepts a string, a number, or null. Numbers are formatted as money.
fn deserialize_amount<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<FieldValue> = Option::deserialize(deserializer)?;
    Ok(match opt {
        None => String::new(),
        Some(FieldValue::Text(s)) => s,
        Some(FieldValue::Number(n)) => format_amount(n),
    })
}

/// Two-decimal money formatting used for every amount in the engine.
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}

// ============================================================================
// RECORDS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantInfo {
    #[serde(default, deserialize_with = "deserialize_display")]
    pub company_name: String,
    #[serde(default, deserialize_with = "deserialize_display")]
    pub address: String,
    #[serde(default, deserialize_with = "deserialize_display")]
    pub phone: String,
    #[serde(default, deserialize_with = "deserialize_display")]
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_display")]
    pub gst: String,
    /// Logo as a data-URI or URL.
    #[serde(default, deserialize_with = "deserialize_display")]
    pub logo: String,
}

/// One invoice line, rendered by table elements.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub rate: f64,
    /// Explicit line amount; `quantity * rate` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
}

impl LineItem {
    pub fn new(name: impl Into<String>, quantity: f64, rate: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            rate,
            amount: None,
        }
    }

    pub fn amount(&self) -> f64 {
        self.amount.unwrap_or(self.quantity * self.rate)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceInfo {
    #[serde(default, deserialize_with = "deserialize_display")]
    pub bill_no: String,
    #[serde(default, deserialize_with = "deserialize_display")]
    pub date: String,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub subtotal: String,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub discount: String,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub tax: String,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub total: String,
    #[serde(default)]
    pub items: Vec<LineItem>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    #[serde(default, deserialize_with = "deserialize_display")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_display")]
    pub phone: String,
    #[serde(default, deserialize_with = "deserialize_display")]
    pub address: String,
    #[serde(default, deserialize_with = "deserialize_display")]
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    #[serde(default, deserialize_with = "deserialize_display")]
    pub name: String,
}

/// Read-only data context for placeholder resolution.
///
/// The same type backs both modes: [`PlaceholderContext::preview`] fills
/// every field with a descriptive label, while a context deserialized from
/// business records carries real values.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlaceholderContext {
    #[serde(default)]
    pub tenant: TenantInfo,
    #[serde(default)]
    pub invoice: InvoiceInfo,
    #[serde(default)]
    pub customer: CustomerInfo,
    #[serde(default)]
    pub user: UserInfo,
}

impl PlaceholderContext {
    /// Preview-mode context: labels that show structure, not data.
    pub fn preview() -> Self {
        let today = chrono::Local::now().format("%d/%m/%Y").to_string();
        Self {
            tenant: TenantInfo {
                company_name: "Your Company Name".into(),
                address: "Company Address".into(),
                phone: "Company Phone".into(),
                email: "company@email.com".into(),
                gst: "GST Number".into(),
                logo: String::new(),
            },
            invoice: InvoiceInfo {
                bill_no: "BILL-001".into(),
                date: today,
                subtotal: format_amount(0.0),
                discount: format_amount(0.0),
                tax: format_amount(0.0),
                total: format_amount(0.0),
                items: vec![LineItem::new("Sample Item", 1.0, 0.0)],
            },
            customer: CustomerInfo {
                name: "Customer Name".into(),
                phone: "Customer Phone".into(),
                address: "Customer Address".into(),
                email: "customer@email.com".into(),
            },
            user: UserInfo {
                name: "Staff Name".into(),
            },
        }
    }

    /// Look up a known field. `None` when the field is not part of the namespace.
    pub fn field(&self, namespace: Namespace, field: &str) -> Option<&str> {
        let value = match (namespace, field) {
            (Namespace::Tenant, "companyName") => &self.tenant.company_name,
            (Namespace::Tenant, "address") => &self.tenant.address,
            (Namespace::Tenant, "phone") => &self.tenant.phone,
            (Namespace::Tenant, "email") => &self.tenant.email,
            (Namespace::Tenant, "gst") => &self.tenant.gst,
            (Namespace::Tenant, "logo") => &self.tenant.logo,
            (Namespace::Invoice, "billNo") => &self.invoice.bill_no,
            (Namespace::Invoice, "date") => &self.invoice.date,
            (Namespace::Invoice, "subtotal") => &self.invoice.subtotal,
            (Namespace::Invoice, "discount") => &self.invoice.discount,
            (Namespace::Invoice, "tax") => &self.invoice.tax,
            (Namespace::Invoice, "total") => &self.invoice.total,
            (Namespace::Customer, "name") => &self.customer.name,
            (Namespace::Customer, "phone") => &self.customer.phone,
            (Namespace::Customer, "address") => &self.customer.address,
            (Namespace::Customer, "email") => &self.customer.email,
            (Namespace::User, "name") => &self.user.name,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// Parse a context from the JSON the data endpoints return.
    pub fn from_json(json: &str) -> Result<Self, crate::BillcanvasError> {
        Ok(serde_json::from_str(json)?)
    }
}
