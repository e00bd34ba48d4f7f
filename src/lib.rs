pub mod shared {
    pub mod core {
        pub mod errors;
        pub mod month;
        pub mod validation;
    }
    pub mod infrastructure {
        pub mod audit_log;
        pub mod identity;
        pub mod record_store;
    }
}

pub mod modules {
    pub mod time_entries {
        pub mod core {
            pub mod driver_stats;
            pub mod monthly_report;
            pub mod time_entry;
        }
        pub mod use_cases {
            pub mod add_time_entry {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_time_entry {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod driver_leaderboard {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_time_entries {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod monthly_report {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
            }
        }
    }

    pub mod shifts {
        pub mod core {
            pub mod break_policy;
            pub mod driver;
            pub mod net_duration;
            pub mod report;
            pub mod shift;
            pub mod view_state;
        }
        pub mod use_cases {
            pub mod manage_drivers {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod record_shift {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_shift {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_shifts {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod shift_report {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_audit_logs {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod advance_view {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }

    pub mod accounts {
        pub mod inbound {
            pub mod http;
        }
    }
}

pub mod shell;

#[cfg(test)]
pub mod tests {
    pub mod fixtures;

    pub mod e2e {
        pub mod dashboard_flow_tests;
    }
}
