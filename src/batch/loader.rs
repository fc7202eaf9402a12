use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{error, info};

use crate::domain::ProductRequest;
use crate::error::{LookupError, Result};

#[derive(Debug, Deserialize)]
struct RequestRow {
    name: Option<String>,
    product_name: Option<String>,
    quantity: Option<String>,
    catalog_number: Option<String>,
    additional_info: Option<String>,
}

/// Reads requests, or an empty batch when any row is unreadable. The cause is logged.
pub fn load_requests(path: impl AsRef<Path>) -> Vec<ProductRequest> {
    let path = path.as_ref();
    match read_requests(path) {
        Ok(requests) => {
            info!(path = %path.display(), count = requests.len(), "loaded product requests");
            requests
        }
        Err(err) => {
            error!(error = %err, "error loading products from CSV");
            Vec::new()
        }
    }
}

pub fn read_requests(path: impl AsRef<Path>) -> Result<Vec<ProductRequest>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| LookupError::BatchLoad {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    read_requests_from(file, path)
}

/// Fails on the first bad row; no partial batch is returned.
pub fn read_requests_from<R: Read>(reader: R, path: &Path) -> Result<Vec<ProductRequest>> {
    let load_error = |message: String| LookupError::BatchLoad {
        path: path.to_path_buf(),
        message,
    };

    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut requests = Vec::new();
    for (i, record) in rdr.deserialize::<RequestRow>().enumerate() {
        let line = i + 2;
        let row = record.map_err(|err| load_error(format!("row {}: {}", line, err)))?;
        let request =
            row_to_request(row).map_err(|msg| load_error(format!("row {}: {}", line, msg)))?;
        requests.push(request);
    }
    Ok(requests)
}

fn row_to_request(row: RequestRow) -> std::result::Result<ProductRequest, String> {
    let name = non_empty(row.name)
        .or_else(|| non_empty(row.product_name))
        .ok_or_else(|| "missing product name".to_string())?;

    let mut request = ProductRequest::new(name);
    if let Some(raw) = non_empty(row.quantity) {
        request = request.with_quantity(parse_quantity(&raw)?);
    }
    if let Some(catalog_number) = non_empty(row.catalog_number) {
        request = request.with_catalog_number(catalog_number);
    }
    if let Some(info) = non_empty(row.additional_info) {
        request = request.with_additional_info(info);
    }
    Ok(request)
}

/// Accepts whole numbers, including the `3.0` form spreadsheet exports produce.
fn parse_quantity(raw: &str) -> std::result::Result<u32, String> {
    if let Ok(q) = raw.parse::<u32>() {
        return Ok(q);
    }
    match raw.parse::<f64>() {
        Ok(q) if q.fract() == 0.0 && q >= 0.0 && q <= f64::from(u32::MAX) => Ok(q as u32),
        _ => Err(format!("invalid quantity {:?}", raw)),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
