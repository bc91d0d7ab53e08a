#[cfg(test)]
mod system_tests;
