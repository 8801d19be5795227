// Crate entry point. Declares the module tree so the binary and tests can reach it.
//
// Responsibilities
// - Only declare and expose modules. No business logic here.

pub mod modules {
    pub mod dogs {
        pub mod core {
            pub mod dog;
            pub mod registry_port;
            pub mod seed;
        }
        pub mod use_cases {
            pub mod create_dog {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_dogs {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_dog {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_dog {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod registry_in_memory;
            }
        }
    }
    pub mod posts {
        pub mod core {
            pub mod post;
            pub mod post_log_port;
        }
        pub mod use_cases {
            pub mod create_post {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod post_log_in_memory;
            }
        }
    }
}

pub mod shell;
