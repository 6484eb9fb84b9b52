/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
/// HTTP session and request plumbing
pub mod http;
/// Request models for API calls
pub mod requests;
/// Response models from API calls
pub mod responses;
