//! Command handlers organized by area.
//!
//! | Module | Commands |
//! |--------|----------|
//! | `names` | name_show, name_history, name_scan, name_pending, name_export, name_checkdb |
//! | `rawtx` | namerawtransaction |

pub mod names;
pub mod rawtx;
