pub mod workforce_command_service_impl;
