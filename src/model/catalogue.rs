//! Catalogue of supported sites and the organizations behind them.

// self
use crate::{
	_prelude::*,
	asset::AssetUrl,
	envelope::null_as_default,
	id::{SiteId, SiteOrganizationId},
};

/// Credential field a site expects.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CredentialField {
	/// Key used in [`CredentialRequest::credentials`](crate::model::CredentialRequest).
	pub name: String,
	/// Input type (`text`, `password`, ...).
	#[serde(rename = "type", default, deserialize_with = "null_as_default")]
	pub kind: String,
	/// Human-readable label.
	#[serde(default, deserialize_with = "null_as_default")]
	pub label: String,
	/// Whether the site rejects submissions without this field.
	#[serde(default, deserialize_with = "null_as_default")]
	pub required: bool,
	/// Whether this field is the account username.
	#[serde(default, deserialize_with = "null_as_default")]
	pub username: bool,
	/// Opaque validation rules.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub validation: Option<serde_json::Value>,
}

/// Site that credentials can be linked against.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Catalogue {
	/// Site identifier.
	pub id_site: SiteId,
	/// Owning organization.
	#[serde(default, deserialize_with = "null_as_default")]
	pub id_site_organization: String,
	/// Organization type (bank, utility, ...).
	#[serde(default, deserialize_with = "null_as_default")]
	pub id_site_organization_type: String,
	/// Site name.
	#[serde(default, deserialize_with = "null_as_default")]
	pub name: String,
	/// Fields the site expects.
	#[serde(default, deserialize_with = "null_as_default")]
	pub credentials: Vec<CredentialField>,
}
impl Catalogue {
	/// Iterates the required fields.
	pub fn required_fields(&self) -> impl Iterator<Item = &CredentialField> {
		self.credentials.iter().filter(|field| field.required)
	}

	/// Fills every required field with `value`, as sandbox sites accept.
	pub fn test_credentials(&self, value: &str) -> BTreeMap<String, String> {
		self.required_fields().map(|field| (field.name.clone(), value.to_owned())).collect()
	}
}

/// Organization (bank, utility, government office) owning one or more sites.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteOrganization {
	/// Organization identifier.
	pub id_site_organization: SiteOrganizationId,
	/// Organization type.
	#[serde(default, deserialize_with = "null_as_default")]
	pub id_site_organization_type: String,
	/// Country code.
	#[serde(default, deserialize_with = "null_as_default")]
	pub id_country: String,
	/// Display name.
	#[serde(default, deserialize_with = "null_as_default")]
	pub name: String,
	/// Logo.
	#[serde(default)]
	pub avatar: AssetUrl,
	/// Small cover image.
	#[serde(default)]
	pub small_cover: AssetUrl,
	/// Cover image.
	#[serde(default)]
	pub cover: AssetUrl,
}
impl SiteOrganization {
	/// Re-resolves every asset against `host`.
	pub fn with_static_base(mut self, host: &str) -> Self {
		self.avatar = self.avatar.rehost(host);
		self.small_cover = self.small_cover.rehost(host);
		self.cover = self.cover.rehost(host);

		self
	}
}
