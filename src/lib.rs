pub mod modules {
    pub mod memories {
        pub mod core {
            pub mod entry;
            pub mod ports;
            pub mod store;
        }
        pub mod use_cases {
            pub mod wake_up {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod create_memory {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_memories {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
                pub mod query;
            }
            pub mod delete_memory {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod memories_in_memory;
            }
        }
    }
}

pub mod shell;
