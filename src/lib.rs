pub mod shared {
    pub mod infrastructure {
        pub mod entry_store;
        pub mod remote_mirror;
    }
}

pub mod modules {
    pub mod volunteer_log {
        pub mod core {
            pub mod collection;
            pub mod csv_export;
            pub mod entry;
            pub mod grouping;
            pub mod repair;
            pub mod task_type;
        }
        pub mod use_cases {
            pub mod load_entries {
                pub mod handler;
            }
            pub mod submit_entry {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_entries_by_month {
                pub mod view;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod export_month {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod collection_store;
                pub mod mirror_dispatch;
            }
        }
    }
}

pub mod shell;
