//! Section views. Their content lives outside the shell; each one shows a
//! titled placeholder with the props it was mounted with.

use ipc_nexus::Props;
use ipc_setup::view;

#[view("Group")]
pub struct GroupPage {
    props: Props,
}

#[view("Groups")]
pub struct GroupsPage {
    props: Props,
}

#[view("Usage")]
pub struct UsagePage {
    props: Props,
}

#[view("Upload")]
pub struct UploadPage {
    props: Props,
}
