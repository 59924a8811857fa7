//! One-shot fetcher for the JPL SSD close-approach dataset.
//!
//! Downloads the full cad.api result set and writes the raw body verbatim
//! to the cache file the viewer reads. Runs independently of the viewer;
//! a transport or HTTP-status failure aborts this run and nothing else.

use std::io::Read;

const CAD_API_URL: &str = "https://ssd-api.jpl.nasa.gov/cad.api?\
    dist-max=0.2AU&date-min=1900-01-01&date-max=2200-12-31&fullname=true&sort=dist";
const CACHE_FILE: &str = "cad.customization.json";

fn fetch_cad_body(url: &str) -> Result<String, String> {
    // non-2xx statuses surface as Err from call()
    let response = ureq::get(url)
        .call()
        .map_err(|e| format!("HTTP error: {e}"))?;

    let mut body = String::new();
    response
        .into_reader()
        .read_to_string(&mut body)
        .map_err(|e| format!("Read error: {e}"))?;
    Ok(body)
}

fn main() {
    println!("Fetching close-approach data from JPL...");
    let body = match fetch_cad_body(CAD_API_URL) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("Error fetching data: {e}");
            std::process::exit(1);
        }
    };
    if let Err(e) = std::fs::write(CACHE_FILE, &body) {
        eprintln!("Error writing {CACHE_FILE}: {e}");
        std::process::exit(1);
    }
    println!("Data saved to '{CACHE_FILE}'");
}
