pub mod payment_plan;
