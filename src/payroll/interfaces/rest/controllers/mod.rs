pub mod payroll_rest_controller;
