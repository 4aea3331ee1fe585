use vendrec_core::StockRecord;

use crate::csv::{read_csv_catalog, CatalogColumns};
use crate::{CatalogError, CatalogSource};

/// Stock catalog published as a CSV document at a fixed URL, typically a
/// shared-spreadsheet export link the bookkeeper keeps current.
pub struct RemoteCatalog {
    url: String,
    columns: CatalogColumns,
}

impl RemoteCatalog {
    pub fn new(url: impl Into<String>) -> Self {
        RemoteCatalog { url: url.into(), columns: CatalogColumns::default() }
    }

    pub fn with_columns(url: impl Into<String>, columns: CatalogColumns) -> Self {
        RemoteCatalog { url: url.into(), columns }
    }
}

impl CatalogSource for RemoteCatalog {
    fn load(&self) -> Result<Vec<StockRecord>, CatalogError> {
        let response = reqwest::blocking::get(&self.url)?;
        if !response.status().is_success() {
            return Err(CatalogError::FetchStatus(response.status().as_u16()));
        }
        let body = response.bytes()?;
        read_csv_catalog(body.as_ref(), &self.columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn fetches_and_parses_a_published_csv() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/stock.csv");
            then.status(200)
                .body("Item,Balance\nSunflower Oil 1L,14\nMustard Oil 1L,3\n");
        });

        let records = RemoteCatalog::new(server.url("/stock.csv")).load().unwrap();

        mock.assert();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].item, "Sunflower Oil 1L");
    }

    #[test]
    fn non_success_status_is_a_fetch_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/stock.csv");
            then.status(404);
        });

        let err = RemoteCatalog::new(server.url("/stock.csv")).load().unwrap_err();
        assert!(matches!(err, CatalogError::FetchStatus(404)));
    }

    #[test]
    fn empty_remote_document_is_no_rows() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/stock.csv");
            then.status(200).body("Item,Balance\n");
        });

        let err = RemoteCatalog::new(server.url("/stock.csv")).load().unwrap_err();
        assert!(matches!(err, CatalogError::NoRows));
    }
}
