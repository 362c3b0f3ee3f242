//! Request signatures.
//!
//! Every call is signed with an uppercase hex MD5 digest over the API key,
//! a fixed run of `name + value` pairs and the terminal secret. The order of
//! the pieces differs per endpoint and the server rejects any mismatch, so
//! each endpoint gets its own helper below.

/// Concatenate `parts` in order and return the uppercase hex MD5 digest of
/// the UTF-8 bytes. Always 32 characters.
pub fn sign<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let raw: String = parts.into_iter().map(|p| p.as_ref().to_owned()).collect();
    format!("{:X}", md5::compute(raw.as_bytes()))
}

pub fn print_signature(
    api_key: &str,
    machine_code: &str,
    partner: &str,
    time: &str,
    machine_secret_key: &str,
) -> String {
    sign([
        api_key,
        "machine_code",
        machine_code,
        "partner",
        partner,
        "time",
        time,
        machine_secret_key,
    ])
}

pub fn add_machine_signature(
    api_key: &str,
    machine_code: &str,
    mobile_phone: &str,
    partner: &str,
    print_name: &str,
    username: &str,
    machine_secret_key: &str,
) -> String {
    sign([
        api_key,
        "machine_code",
        machine_code,
        "mobilephone",
        mobile_phone,
        "partner",
        partner,
        "printname",
        print_name,
        "username",
        username,
        machine_secret_key,
    ])
}

pub fn remove_machine_signature(
    api_key: &str,
    machine_code: &str,
    partner: &str,
    machine_secret_key: &str,
) -> String {
    sign([
        api_key,
        "machine_code",
        machine_code,
        "partner",
        partner,
        machine_secret_key,
    ])
}
