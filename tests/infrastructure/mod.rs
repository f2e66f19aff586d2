mod in_memory_tab_store_test;
