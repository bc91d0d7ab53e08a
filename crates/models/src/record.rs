/// A row held by the record store, addressed by a sequential integer id.
pub trait Record: Clone {
    /// Human readable kind used in log lines and error messages.
    const KIND: &'static str;

    fn id(&self) -> i32;
}
