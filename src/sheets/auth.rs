use error_stack::ResultExt;
use google_sheets4::hyper;
use google_sheets4::oauth2::{self, authenticator::Authenticator, ServiceAccountKey};

use super::{http_client::HttpsConnector, spreadsheet_manager::SpreadsheetManagerError};

pub async fn read_service_account_key(
    priv_key_path: &str,
) -> error_stack::Result<ServiceAccountKey, SpreadsheetManagerError> {
    oauth2::read_service_account_key(priv_key_path)
        .await
        .change_context(SpreadsheetManagerError::FailedToReadCredentials)
        .attach_printable_lazy(|| {
            format!(
                "Could not read service account key at '{}'",
                priv_key_path
            )
        })
}

pub async fn auth(
    secret: ServiceAccountKey,
    client: hyper::Client<HttpsConnector>,
) -> error_stack::Result<Authenticator<HttpsConnector>, SpreadsheetManagerError> {
    oauth2::ServiceAccountAuthenticator::with_client(secret, client)
        .build()
        .await
        .change_context(SpreadsheetManagerError::FailedToBuildAuthenticator)
}
