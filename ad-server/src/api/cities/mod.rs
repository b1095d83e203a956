pub mod cities;
pub mod city_check_response;
pub mod city_list_response;
pub mod city_search_query;
pub mod city_validate_query;
