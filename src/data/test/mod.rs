mod user_flag;
