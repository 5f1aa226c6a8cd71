//! Account info and settings
//!
//! Singleton endpoints; no pagination involved.

use serde::Deserialize;

use crate::client::AdminClient;
use crate::error::Result;
use crate::params::RequestParams;

/// Account-wide object counts
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AccountInfo {
    #[serde(default)]
    pub admin_count: u64,
    #[serde(default)]
    pub integration_count: u64,
    #[serde(default)]
    pub user_count: u64,
    #[serde(default)]
    pub user_pending_deletion_count: u64,
    #[serde(default)]
    pub telephony_credits_remaining: u64,
}

/// Account-wide settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AccountSettings {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub caller_id: String,
    #[serde(default)]
    pub fraud_email: String,
    #[serde(default)]
    pub fraud_email_enabled: bool,
    #[serde(default)]
    pub helpdesk_bypass: String,
    #[serde(default)]
    pub helpdesk_bypass_expiration: u64,
    #[serde(default)]
    pub helpdesk_can_send_enroll_email: bool,
    #[serde(default)]
    pub helpdesk_message: String,
    #[serde(default)]
    pub inactive_user_expiration: u64,
    #[serde(default)]
    pub keypress_confirm: String,
    #[serde(default)]
    pub keypress_fraud: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub lockout_expire_duration: u64,
    #[serde(default)]
    pub lockout_threshold: u64,
    #[serde(default)]
    pub minimum_password_length: u64,
    #[serde(default)]
    pub password_requires_lower_alpha: bool,
    #[serde(default)]
    pub password_requires_numeric: bool,
    #[serde(default)]
    pub password_requires_special: bool,
    #[serde(default)]
    pub password_requires_upper_alpha: bool,
    #[serde(default)]
    pub sms_batch: u64,
    #[serde(default)]
    pub sms_expiration: u64,
    #[serde(default)]
    pub sms_message: String,
    #[serde(default)]
    pub sms_refresh: u64,
    #[serde(default)]
    pub telephony_warning_min: u64,
    #[serde(default)]
    pub timezone: String,
    #[serde(default)]
    pub user_telephony_cost_max: f64,
}

impl AdminClient {
    /// Retrieve account counts: GET `/admin/v1/info/summary`
    pub async fn get_account_summary(&self) -> Result<AccountInfo> {
        self.get_object("/admin/v1/info/summary", RequestParams::new())
            .await
    }

    /// Retrieve account settings: GET `/admin/v1/settings`
    pub async fn get_account_settings(&self) -> Result<AccountSettings> {
        self.get_object("/admin/v1/settings", RequestParams::new())
            .await
    }
}
