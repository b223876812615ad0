//! Read-only catalogue listings.

// self
use crate::{
	_prelude::*,
	client::Client,
	config::DEFAULT_STATIC_BASE,
	http::ApiHttpClient,
	model::{Catalogue, SiteOrganization},
	obs::Operation,
	sign::Query,
};

impl<C> Client<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Lists site organizations with their assets resolved against the configured static host.
	pub async fn site_organizations(&self, query: &Query) -> Result<Vec<SiteOrganization>> {
		let organizations: Vec<SiteOrganization> = self
			.get(Operation::SiteOrganizations, "/catalogues/site_organizations", query)
			.await?
			.unwrap_or_default();
		let static_base = self.config().static_base.as_str();

		if static_base == DEFAULT_STATIC_BASE {
			return Ok(organizations);
		}

		Ok(organizations.into_iter().map(|org| org.with_static_base(static_base)).collect())
	}

	/// Lists sites; pass `is_test=true` to restrict the listing to sandbox sites.
	pub async fn catalogues(&self, query: &Query) -> Result<Vec<Catalogue>> {
		Ok(self.get(Operation::Catalogues, "/catalogues/sites", query).await?.unwrap_or_default())
	}
}
