pub mod shared {
    pub mod core {
        pub mod primitives;
    }
}

pub mod modules {
    pub mod accounts {
        pub mod core {
            pub mod errors;
            pub mod session;
        }
        pub mod adapters {
            pub mod outbound {
                pub mod identity_provider;
                pub mod identity_provider_in_memory;
                pub mod profile_store;
                pub mod profile_store_in_memory;
                pub mod session_storage;
                pub mod session_storage_file;
                pub mod session_storage_in_memory;
            }
        }
        pub mod use_cases {
            pub mod session_gate {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_profile_settings {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
    pub mod catalog {
        pub mod core {
            pub mod service;
        }
        pub mod adapters {
            pub mod outbound {
                pub mod catalog_store;
                pub mod catalog_store_in_memory;
            }
        }
        pub mod use_cases {
            pub mod list_services {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
    }
    pub mod appointments {
        pub mod core {
            pub mod appointment;
            pub mod availability;
            pub mod update;
        }
        pub mod use_cases {
            pub mod list_available_slots {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod submit_booking {
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod request;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod manage_appointments {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod appointment_store;
                pub mod appointment_store_in_memory;
            }
        }
    }
}

pub mod shell;
