use crate::domain::model::StatusFormat;

/// Source of the settings a session is built from.
pub trait ConfigProvider {
    fn id_prefix(&self) -> &str;
    fn min_stability(&self) -> f64;
    fn max_stability(&self) -> f64;
    fn seed(&self) -> Option<u64>;
    fn status_format(&self) -> StatusFormat;
}
