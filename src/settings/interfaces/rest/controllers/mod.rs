pub mod settings_rest_controller;
