use serde::{Deserialize, Serialize};

pub const SYSTEM_PROMPT: &str = "You are an expert Solidity security auditor.";
pub const USER_PROMPT_PREFIX: &str = "Audit this smart contract and summarize key issues:\n";

/// Two-message chat prompt sent to the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditPrompt {
    pub system: String,
    pub user: String,
}

impl AuditPrompt {
    pub fn for_source(source: &str) -> Self {
        Self {
            system: SYSTEM_PROMPT.to_string(),
            user: format!("{}{}", USER_PROMPT_PREFIX, source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_embedded_after_instruction() {
        let prompt = AuditPrompt::for_source("contract X {}");

        assert_eq!(prompt.system, SYSTEM_PROMPT);
        assert_eq!(
            prompt.user,
            "Audit this smart contract and summarize key issues:\ncontract X {}"
        );
    }
}
