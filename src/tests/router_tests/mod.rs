mod weather_tests;
