pub mod commands {
    pub mod submit_entry;
}

pub mod entries {
    pub mod entry;
}
