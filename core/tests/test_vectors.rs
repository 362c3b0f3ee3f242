//! Verify signing, markup and build/parse methods against JSON test vectors
//! stored in `test-vectors/`.
//!
//! Digests in the vectors were produced independently of this crate, so a
//! change to field order or hex casing fails here rather than at the vendor.

use yly_core::{
    encode_barcode, encode_qr, sign, ApiError, Credentials, HttpResponse, MarkupError, PrintJob,
    PrinterClient, Terminal,
};

const BASE_URL: &str = "http://localhost:8888";

fn client(vectors: &serde_json::Value) -> PrinterClient {
    let creds = &vectors["credentials"];
    PrinterClient::new(
        Credentials::new(
            creds["partner_id"].as_str().unwrap(),
            creds["api_key"].as_str().unwrap(),
            creds["username"].as_str().unwrap(),
        ),
        BASE_URL,
    )
}

fn expected_form(expected_req: &serde_json::Value) -> Vec<(String, String)> {
    expected_req["form"]
        .as_array()
        .unwrap()
        .iter()
        .map(|pair| {
            let arr = pair.as_array().unwrap();
            (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
        })
        .collect()
}

fn expected_url(expected_req: &serde_json::Value) -> String {
    format!("{BASE_URL}{}", expected_req["path"].as_str().unwrap())
}

fn simulated(case: &serde_json::Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        body: sim["body"].as_str().unwrap().to_string(),
    }
}

fn terminal(input: &serde_json::Value) -> Terminal {
    Terminal::new(
        input["machine_code"].as_str().unwrap(),
        input["machine_secret_key"].as_str().unwrap(),
    )
}

// ---------------------------------------------------------------------------
// Sign
// ---------------------------------------------------------------------------

#[test]
fn sign_test_vectors() {
    let raw = include_str!("../../test-vectors/sign.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let parts: Vec<&str> = case["parts"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p.as_str().unwrap())
            .collect();
        assert_eq!(sign(&parts), case["expected"].as_str().unwrap(), "{name}");
    }
}

// ---------------------------------------------------------------------------
// Markup
// ---------------------------------------------------------------------------

fn check_markup(
    kind: &str,
    case: &serde_json::Value,
    result: Result<String, MarkupError>,
) {
    let name = case["name"].as_str().unwrap();
    if let Some(expected_error) = case.get("expected_error") {
        let err = result.unwrap_err();
        match expected_error.as_str().unwrap() {
            "QrTooLong" => assert!(matches!(err, MarkupError::QrTooLong { .. }), "{kind}/{name}"),
            "BarcodeNotNumeric" => {
                assert_eq!(err, MarkupError::BarcodeNotNumeric, "{kind}/{name}")
            }
            other => panic!("{kind}/{name}: unknown expected_error: {other}"),
        }
        assert_eq!(err.legacy_text(), case["legacy_text"].as_str(), "{kind}/{name}: legacy text");
    } else {
        assert_eq!(result.unwrap(), case["expected"].as_str().unwrap(), "{kind}/{name}");
    }
}

#[test]
fn markup_test_vectors() {
    let raw = include_str!("../../test-vectors/markup.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["qr"].as_array().unwrap() {
        check_markup("qr", case, encode_qr(case["input"].as_str().unwrap()));
    }
    for case in vectors["barcode"].as_array().unwrap() {
        check_markup("barcode", case, encode_barcode(case["input"].as_str().unwrap()));
    }
}

// ---------------------------------------------------------------------------
// Print
// ---------------------------------------------------------------------------

#[test]
fn print_test_vectors() {
    let raw = include_str!("../../test-vectors/print.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client(&vectors);
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let input = &case["input"];
        let expected_req = &case["expected_request"];

        // Verify build
        let job = PrintJob::new(terminal(input), input["content"].as_str().unwrap())
            .repeat(input["repeat"].as_u64().unwrap() as u8);
        let req = c.build_print(&job, input["timestamp"].as_u64().unwrap());
        assert_eq!(req.url, expected_url(expected_req), "{name}: url");
        assert_eq!(req.form, expected_form(expected_req), "{name}: form");

        // Verify parse
        let result = c.parse_print(simulated(case));
        if let Some(expected_error) = case.get("expected_error") {
            let err = result.unwrap_err();
            match expected_error.as_str().unwrap() {
                "Deserialization" => assert!(
                    matches!(err, ApiError::Deserialization(_)),
                    "{name}: expected Deserialization"
                ),
                other => panic!("{name}: unknown expected_error: {other}"),
            }
        } else {
            let resp = result.unwrap();
            assert_eq!(resp.raw(), &case["expected_result"], "{name}: parsed result");
            let success = case["expected_success"].as_bool().unwrap();
            assert_eq!(resp.is_success(), success, "{name}: success");
        }
    }
}

// ---------------------------------------------------------------------------
// Add machine
// ---------------------------------------------------------------------------

#[test]
fn add_machine_test_vectors() {
    let raw = include_str!("../../test-vectors/add_machine.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client(&vectors);
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let input = &case["input"];
        let expected_req = &case["expected_request"];

        // Verify build
        let req = c.build_add_machine(
            &terminal(input),
            input["print_name"].as_str().unwrap(),
            input["mobile_phone"].as_str().unwrap(),
        );
        assert_eq!(req.url, expected_url(expected_req), "{name}: url");
        assert_eq!(req.form, expected_form(expected_req), "{name}: form");

        // Verify parse
        let body = c.parse_add_machine(simulated(case)).unwrap();
        assert_eq!(body, case["expected_result"].as_str().unwrap(), "{name}: parsed result");
    }
}

// ---------------------------------------------------------------------------
// Remove machine
// ---------------------------------------------------------------------------

#[test]
fn remove_machine_test_vectors() {
    let raw = include_str!("../../test-vectors/remove_machine.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client(&vectors);
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let expected_req = &case["expected_request"];

        // Verify build
        let req = c.build_remove_machine(&terminal(&case["input"]));
        assert_eq!(req.url, expected_url(expected_req), "{name}: url");
        assert_eq!(req.form, expected_form(expected_req), "{name}: form");

        // Verify parse
        let body = c.parse_remove_machine(simulated(case)).unwrap();
        assert_eq!(body, case["expected_result"].as_str().unwrap(), "{name}: parsed result");
    }
}
