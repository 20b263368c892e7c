pub mod shared {
    pub mod patch_field;
}

pub mod modules {
    pub mod expenses {
        pub mod core {
            pub mod expense;
            pub mod ports;
        }
        pub mod use_cases {
            pub mod list_expenses {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod create_expense {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_expense {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_expense {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http_response;
            }
            pub mod outbound {
                pub mod expenses_in_memory;
            }
        }
    }
}

pub mod shell;

#[cfg(test)]
pub mod tests {
    pub mod fixtures;
}
