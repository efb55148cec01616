pub mod p100_final_table;
