/// Data structures for Extension Hub
use serde::{Deserialize, Serialize};

/// A browser tab as returned by the tab-query bridge.
///
/// Every field is optional: the host hands back whatever it knows about
/// a tab, and discarded/internal pages routinely lack a title. Unknown
/// fields in the payload are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabInfo {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}
