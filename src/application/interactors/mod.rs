pub mod account;
pub mod education;
pub mod experience;
pub mod profile;

/// Empty strings count as "not provided", same as an absent key.
pub(crate) fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
