//! Accounts and transactions retrieved once a credential finished verification.
//!
//! The commonly used fields are typed; everything else the API sends lands in `extra`.

// self
use crate::{_prelude::*, envelope::null_as_default, id::AccountId};

type Extra = serde_json::Map<String, serde_json::Value>;

/// Financial account linked through a credential.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Account {
	/// Account identifier.
	pub id_account: AccountId,
	/// Credential that produced the account.
	#[serde(default)]
	pub id_credential: Option<String>,
	/// Catalogue site.
	#[serde(default)]
	pub id_site: Option<String>,
	/// Organization owning the site.
	#[serde(default)]
	pub id_site_organization: Option<String>,
	/// Account name.
	#[serde(default, deserialize_with = "null_as_default")]
	pub name: String,
	/// Account number (usually masked).
	#[serde(default)]
	pub number: Option<String>,
	/// Current balance.
	#[serde(default)]
	pub balance: Option<f64>,
	/// ISO currency code.
	#[serde(default)]
	pub currency: Option<String>,
	/// Last refresh time.
	#[serde(rename = "dt_refresh", default, with = "time::serde::timestamp::option")]
	pub refreshed_at: Option<OffsetDateTime>,
	/// Fields without a typed counterpart.
	#[serde(flatten)]
	pub extra: Extra,
}

/// Movement on an [`Account`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
	/// Transaction identifier.
	pub id_transaction: String,
	/// Account the transaction belongs to.
	#[serde(default)]
	pub id_account: Option<String>,
	/// Catalogue site.
	#[serde(default)]
	pub id_site: Option<String>,
	/// Statement description.
	#[serde(default, deserialize_with = "null_as_default")]
	pub description: String,
	/// Signed amount.
	#[serde(default)]
	pub amount: Option<f64>,
	/// ISO currency code.
	#[serde(default)]
	pub currency: Option<String>,
	/// Booking time.
	#[serde(rename = "dt_transaction", default, with = "time::serde::timestamp::option")]
	pub transacted_at: Option<OffsetDateTime>,
	/// Last refresh time.
	#[serde(rename = "dt_refresh", default, with = "time::serde::timestamp::option")]
	pub refreshed_at: Option<OffsetDateTime>,
	/// Fields without a typed counterpart.
	#[serde(flatten)]
	pub extra: Extra,
}
