//! Cross-crate tests for the commission calculator.

#[cfg(test)]
mod commission;
