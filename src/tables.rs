pub mod clenshaw_curtis_table;
