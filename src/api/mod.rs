// External API clients
pub mod youtube;

#[cfg(test)]
pub mod mock_upstream;
