// crates.io
use httpmock::prelude::*;
// self
use paybook_sync::_preludet::*;

#[tokio::test]
async fn site_organizations_resolve_assets_against_the_static_host() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.base_url());
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/v1/catalogues/site_organizations")
				.query_param("api_key", TEST_API_KEY);
			then.status(200).header("content-type", "application/json").json_body(ok_envelope(
				json!([{
					"id_site_organization": "org-1",
					"id_site_organization_type": "type-1",
					"id_country": "mx",
					"name": "Banamex",
					"avatar": "/images/avatar.png",
					"small_cover": "",
					"cover": "https://cdn.example.com/cover.png",
				}]),
			));
		})
		.await;
	let organizations = client
		.site_organizations(&Query::new())
		.await
		.expect("Site organization listing should succeed.");
	let org = organizations.first().expect("One organization should be returned.");

	assert_eq!(org.avatar.as_str(), server.url("/static/images/avatar.png"));
	assert!(org.small_cover.is_empty());
	assert_eq!(org.cover.as_str(), "https://cdn.example.com/cover.png");
	assert_eq!(client.asset_url("/x.png").as_str(), server.url("/static/x.png"));

	mock.assert_async().await;
}

#[tokio::test]
async fn catalogues_forward_filters_and_fill_test_credentials() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.base_url());
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/catalogues/sites").query_param("is_test", "true");
			then.status(200).header("content-type", "application/json").json_body(ok_envelope(
				json!([{
					"id_site": "site-normal",
					"id_site_organization": "org-1",
					"id_site_organization_type": "type-1",
					"name": "Normal",
					"credentials": [
						{ "name": "username", "type": "text", "label": "Username", "required": true, "username": true },
						{ "name": "password", "type": "password", "label": "Password", "required": true, "username": false },
					],
				}]),
			));
		})
		.await;
	let catalogues = client
		.catalogues(&Query::new().with("is_test", "true"))
		.await
		.expect("Catalogue listing should succeed.");

	assert_eq!(catalogues.len(), 1);
	assert_eq!(catalogues[0].test_credentials("test").len(), 2);

	mock.assert_async().await;
}

#[tokio::test]
async fn catalogue_failures_are_not_swallowed() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.base_url());
	let _sites = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/catalogues/sites");
			then.status(401)
				.header("content-type", "application/json")
				.json_body(failed_envelope(401, "Invalid API key"));
		})
		.await;
	let _orgs = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/catalogues/site_organizations");
			then.status(401)
				.header("content-type", "application/json")
				.json_body(failed_envelope(401, "Invalid API key"));
		})
		.await;
	let err = client.catalogues(&Query::new()).await.expect_err("Failure should surface.");

	assert_eq!(err.to_string(), "Invalid API key");

	let err = client.site_organizations(&Query::new()).await.expect_err("Failure should surface.");

	assert_eq!(err.to_string(), "Invalid API key");
}

#[tokio::test]
async fn malformed_json_is_a_decode_error() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.base_url());
	let _mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/catalogues/sites");
			then.status(502).header("content-type", "text/html").body("<html>Bad Gateway</html>");
		})
		.await;
	let err = client.catalogues(&Query::new()).await.expect_err("HTML should fail to decode.");

	assert!(matches!(
		err,
		Error::Decode(paybook_sync::error::DecodeError::Json { status: 502, .. })
	));
}
