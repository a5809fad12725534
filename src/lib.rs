pub mod shared {
    pub mod http {
        pub mod api_error;
        pub mod path_id;
    }
    pub mod infrastructure {
        pub mod employee_store;
    }
}

pub mod modules {
    pub mod employees {
        pub mod core {
            pub mod decide;
            pub mod employee;
            pub mod errors;
            pub mod ports;
            pub mod statistics;
        }
        pub mod use_cases {
            pub mod list_employees {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_employee {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod create_employee {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_employee {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_employee {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod employee_client;
            }
        }
        pub mod views {
            pub mod dashboard;
            pub mod employee_form;
            pub mod employee_list;
            pub mod form_flow;
            pub mod load_state;
        }
    }
}

pub mod shell;
