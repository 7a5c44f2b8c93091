pub mod shared {
    pub mod core {
        pub mod primitives;
    }
}

pub mod modules {
    pub mod shipments {
        pub mod core {
            pub mod feeds;
            pub mod shipment;
        }
        pub mod use_cases {
            pub mod get_shipment {
                pub mod handler;
                pub mod queries_port;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_event_feeds {
                pub mod queries_port;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod fixture_data;
                pub mod fixture_store;
            }
        }
    }
}

pub mod shell;
