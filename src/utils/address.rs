use ethers::types::Address;
use ethers::utils::to_checksum;

/// Parse a hex address, enforcing the EIP-55 checksum when the input mixes case.
///
/// All-lowercase and all-uppercase inputs carry no checksum and are accepted as is.
pub fn parse_checked(value: &str) -> Option<Address> {
    let address: Address = value.parse().ok()?;
    let hex = value.strip_prefix("0x").unwrap_or(value);

    let mixed_case = hex.chars().any(|c| c.is_ascii_lowercase())
        && hex.chars().any(|c| c.is_ascii_uppercase());

    if mixed_case && to_checksum(&address, None)[2..] != *hex {
        return None;
    }

    Some(address)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHECKSUMMED: &str = "0x82aD97bEf0b7E17b1D30f56e592Fc819E1eeDAfc";

    #[test]
    fn test_valid_checksum() {
        assert!(parse_checked(CHECKSUMMED).is_some());
    }

    #[test]
    fn test_single_case_has_no_checksum() {
        let lower = parse_checked(&CHECKSUMMED.to_lowercase()).unwrap();
        let upper = parse_checked(&format!("0x{}", CHECKSUMMED[2..].to_uppercase())).unwrap();

        assert_eq!(lower, upper);
        assert_eq!(Some(lower), parse_checked(CHECKSUMMED));
    }

    #[test]
    fn test_bad_checksum_rejected() {
        // `aD` flipped to `AD`
        assert_eq!(parse_checked("0x82AD97bEf0b7E17b1D30f56e592Fc819E1eeDAfc"), None);
    }

    #[test]
    fn test_malformed() {
        assert_eq!(parse_checked("0x1234"), None);
        assert_eq!(parse_checked("0xnot-an-address"), None);
        assert_eq!(parse_checked(""), None);
    }
}
