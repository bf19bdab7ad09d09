//! Fee treasury interface
use ethers::prelude::*;

abigen!(
    Treasury,
    r#"[
        function owner() external view returns (address)
    ]"#,
);
