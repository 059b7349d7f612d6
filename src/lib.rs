pub mod config;

pub mod shared {
    pub mod core {
        pub mod responses;
    }
    pub mod infrastructure {
        pub mod event_store;
    }
}

pub mod modules {
    pub mod events {
        pub mod core {
            pub mod record;
        }
        pub mod use_cases {
            pub mod health_check {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_events {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod create_event {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_event {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
