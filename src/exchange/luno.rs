pub mod client;
pub mod factory;

#[cfg(test)]
pub(crate) mod test_server;
