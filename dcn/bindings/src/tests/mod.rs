mod iterator;
mod mock;
mod reads;
mod writes;
