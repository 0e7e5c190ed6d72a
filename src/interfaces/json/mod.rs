pub mod machine_config;
