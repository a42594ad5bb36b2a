//! Views mounted into the main anchor, plus the chrome around it.

pub mod address;
pub mod index;
pub mod menu;
pub mod sections;

use ipc_setup::view_kind;

pub use address::AddressBar;
pub use index::IndexPage;
pub use menu::Menu;
pub use sections::{GroupPage, GroupsPage, UploadPage, UsagePage};

/// Every view the console can mount.
#[view_kind]
pub enum View {
    Index,
    Group,
    Groups,
    Usage,
    Upload,
}

#[cfg(test)]
mod tests {
    use super::*;
    use ipc_nexus::{Error, ViewKind};

    #[test]
    fn test_view_names() {
        let names: Vec<_> = View::ALL.iter().map(|v| v.name()).collect();
        assert_eq!(names, vec!["index", "group", "groups", "usage", "upload"]);
        assert_eq!(View::Groups.to_string(), "groups");
    }

    #[test]
    fn test_view_from_name() {
        assert_eq!("usage".parse::<View>().unwrap(), View::Usage);
        assert!(matches!(
            "menu".parse::<View>(),
            Err(Error::UnknownView { name }) if name == "menu"
        ));
    }
}
