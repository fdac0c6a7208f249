/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
/// Transport and authenticated HTTP client
pub mod http;
/// Request models for API calls
pub mod requests;
/// Response models from API calls
pub mod responses;
