pub mod settings_command_service_impl;
