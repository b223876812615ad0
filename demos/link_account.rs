//! Walks the account-linking flow against a mock server: create a user and a session, submit
//! sandbox credentials, poll the verification job until it finishes, then list accounts.

// std
use std::time::Duration;
// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use serde_json::json;
// self
use paybook_sync::{
	Client, ClientConfig, PollState,
	http::ReqwestHttpClient,
	model::{CredentialRequest, NewUser, SessionRequest},
	sign::Query,
};

fn envelope(payload: serde_json::Value) -> serde_json::Value {
	json!({ "rid": "demo", "code": 200, "status": true, "errors": null, "message": null, "response": payload })
}

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let status_url = server.url("/v1/jobs/demo/status");

	server
		.mock_async(|when, then| {
			when.method(POST).path("/v1/users");
			then.status(200).json_body(envelope(json!({ "id_user": "u-demo", "name": "Mateo" })));
		})
		.await;
	server
		.mock_async(|when, then| {
			when.method(POST).path("/v1/sessions");
			then.status(200).json_body(envelope(json!({ "token": "tok-demo" })));
		})
		.await;
	server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/catalogues/sites");
			then.status(200).json_body(envelope(json!([{
				"id_site": "site-normal",
				"name": "Normal",
				"credentials": [
					{ "name": "username", "type": "text", "label": "Username", "required": true, "username": true },
					{ "name": "password", "type": "password", "label": "Password", "required": true, "username": false },
				],
			}])));
		})
		.await;
	server
		.mock_async(|when, then| {
			when.method(POST).path("/v1/credentials");
			then.status(200).json_body(envelope(json!({
				"id_credential": "c-demo",
				"username": "t***",
				"ws": "",
				"status": status_url,
				"twofa": "",
			})));
		})
		.await;
	server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/jobs/demo/status");
			then.status(200).json_body(envelope(json!([{ "code": 100 }, { "code": 200 }])));
		})
		.await;
	server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/accounts");
			then.status(200).json_body(envelope(json!([{ "id_account": "a-demo", "name": "Checking" }])));
		})
		.await;

	let config = ClientConfig::builder("demo-key").api_base(server.url("/v1")).build()?;
	let client = <Client<ReqwestHttpClient>>::from_config(config)?;
	let user = client.create_user(&NewUser::new("Mateo")).await?;
	let session = client.create_session(&SessionRequest::from(&user)).await?;
	let catalogues = client.catalogues(&Query::new().with("is_test", "true")).await?;

	for catalogue in catalogues {
		let request = CredentialRequest::new(catalogue.id_site.clone(), session.token.clone())
			.with_credentials(catalogue.test_credentials("test"));
		let credential = client.create_credential(&request).await?;
		let mut poll = client.poll_credential(&credential, &session);

		while let PollState::Pending(code) = poll.poll().await? {
			println!("Site {} still verifying (code {code}).", catalogue.name);

			tokio::time::sleep(Duration::from_millis(200)).await;
		}

		let accounts = client.accounts(&Query::token(&session.token)).await?;

		println!("Site {} linked {} account(s).", catalogue.name, accounts.len());
	}

	Ok(())
}
