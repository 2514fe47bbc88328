pub mod workforce_rest_controller;
