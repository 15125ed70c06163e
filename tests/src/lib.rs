//! End-to-end checks of the registry conversion pipeline against fixture
//! files under `fixtures/`.

#[cfg(test)]
mod util;
