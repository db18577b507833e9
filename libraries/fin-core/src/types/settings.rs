/// Admin settings domain type
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Interest rates per loan product, in percent.
///
/// A rate missing from the server record reads as 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterestRates {
    /// Personal loans
    #[serde(deserialize_with = "null_as_nan")]
    pub personal: f64,
    /// Home loans
    #[serde(deserialize_with = "null_as_nan")]
    pub home: f64,
    /// Business loans
    #[serde(deserialize_with = "null_as_nan")]
    pub business: f64,
    /// Education loans
    #[serde(deserialize_with = "null_as_nan")]
    pub education: f64,
}

impl Default for InterestRates {
    fn default() -> Self {
        Self {
            personal: 0.0,
            home: 0.0,
            business: 0.0,
            education: 0.0,
        }
    }
}

/// System-wide admin settings, fetched and saved as one object.
///
/// Numbers follow JavaScript number semantics: a field may hold NaN after an
/// unparseable edit. NaN serializes as `null` and `null` reads back as NaN.
/// The server owns validation; `min_loan_amount <= max_loan_amount` is not
/// enforced here.
///
/// Keys missing from the server record take their [`Default`] values. Keys
/// the client does not know are kept in `extra` and sent back on save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsRecord {
    /// Display name of the system
    pub system_name: String,
    /// ISO currency code
    pub currency: String,
    /// Rates per loan product
    pub interest_rates: InterestRates,
    /// Send email notifications
    pub email_notifications: bool,
    /// Send SMS notifications
    pub sms_notifications: bool,
    /// Approve loans without manual review
    pub auto_approve_loans: bool,
    /// Largest loan the system grants
    #[serde(deserialize_with = "null_as_nan")]
    pub max_loan_amount: f64,
    /// Smallest loan the system grants
    #[serde(deserialize_with = "null_as_nan")]
    pub min_loan_amount: f64,
    /// Any other fields the server sent
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for SettingsRecord {
    fn default() -> Self {
        Self {
            system_name: "Finance Admin".to_string(),
            currency: "USD".to_string(),
            interest_rates: InterestRates::default(),
            email_notifications: true,
            sms_notifications: true,
            auto_approve_loans: false,
            max_loan_amount: 0.0,
            min_loan_amount: 0.0,
            extra: Map::new(),
        }
    }
}

impl SettingsRecord {
    /// Whether `min_loan_amount <= max_loan_amount`.
    ///
    /// Informational only; false when either side is NaN.
    pub fn loan_range_is_consistent(&self) -> bool {
        self.min_loan_amount <= self.max_loan_amount
    }
}

fn null_as_nan<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_names_are_camel_case() {
        let value = serde_json::to_value(SettingsRecord::default()).unwrap();
        assert_eq!(value["systemName"], json!("Finance Admin"));
        assert_eq!(value["interestRates"]["education"], json!(0.0));
        assert_eq!(value["autoApproveLoans"], json!(false));
        assert!(value.get("maxLoanAmount").is_some());
    }

    #[test]
    fn test_nan_travels_as_null() {
        let mut settings = SettingsRecord::default();
        settings.max_loan_amount = f64::NAN;

        let text = serde_json::to_string(&settings).unwrap();
        assert!(text.contains("\"maxLoanAmount\":null"));

        let back: SettingsRecord = serde_json::from_str(&text).unwrap();
        assert!(back.max_loan_amount.is_nan());
    }

    #[test]
    fn test_missing_keys_take_defaults() {
        let settings: SettingsRecord = serde_json::from_value(json!({
            "systemName": "Acme Lending",
            "interestRates": { "home": 8.75 },
            "maxLoanAmount": 500000
        }))
        .unwrap();

        assert_eq!(settings.system_name, "Acme Lending");
        assert_eq!(settings.interest_rates.home, 8.75);
        assert_eq!(settings.interest_rates.personal, 0.0);
        assert_eq!(settings.max_loan_amount, 500_000.0);
        assert_eq!(settings.min_loan_amount, 0.0);
        assert_eq!(settings.currency, SettingsRecord::default().currency);
        assert!(settings.email_notifications);
    }

    #[test]
    fn test_unknown_keys_are_sent_back() {
        let fetched = json!({
            "_id": "65a1",
            "systemName": "Acme Lending",
            "currency": "EUR",
            "interestRates": { "personal": 12.5, "home": 8.75, "business": 10.0, "education": 5.5 },
            "emailNotifications": true,
            "smsNotifications": false,
            "autoApproveLoans": false,
            "maxLoanAmount": 500000.0,
            "minLoanAmount": 1000.0,
            "updatedAt": "2024-01-10T09:00:00Z"
        });

        let settings: SettingsRecord = serde_json::from_value(fetched.clone()).unwrap();
        assert_eq!(settings.extra.get("_id"), Some(&json!("65a1")));
        assert!(!settings.extra.contains_key("systemName"));

        assert_eq!(serde_json::to_value(&settings).unwrap(), fetched);
    }

    #[test]
    fn test_loan_range_check() {
        let mut settings = SettingsRecord::default();
        settings.min_loan_amount = 1_000.0;
        settings.max_loan_amount = 50_000.0;
        assert!(settings.loan_range_is_consistent());

        settings.min_loan_amount = 60_000.0;
        assert!(!settings.loan_range_is_consistent());

        settings.min_loan_amount = f64::NAN;
        assert!(!settings.loan_range_is_consistent());
    }
}
