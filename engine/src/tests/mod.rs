mod catalog_update_tests;
