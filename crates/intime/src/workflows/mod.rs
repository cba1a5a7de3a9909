pub mod crm;
pub mod submissions;
