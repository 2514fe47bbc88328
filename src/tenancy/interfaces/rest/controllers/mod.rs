pub mod employer_rest_controller;
