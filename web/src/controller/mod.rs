pub(crate) mod fixture_controller;
